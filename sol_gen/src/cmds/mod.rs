pub mod common;
pub mod inspect;
pub mod solarray;
pub mod struct_sort;
