mod formatter;

pub use formatter::CallFormatter;
