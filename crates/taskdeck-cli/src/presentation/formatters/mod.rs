mod date;

pub use date::format_due_date;
