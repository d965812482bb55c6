pub mod string_or_number;
