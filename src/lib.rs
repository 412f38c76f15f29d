pub mod data_structure;
