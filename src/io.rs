pub mod snapshot_dtos;
pub mod snapshot_file;
