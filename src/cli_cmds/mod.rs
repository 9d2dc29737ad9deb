mod catalog_cmds;
mod store_cmds;

pub use catalog_cmds::{cmd_info, cmd_list};
pub use store_cmds::{cmd_download, cmd_upload};
