//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 数据URL创建和资源引用判断
//! - 可失败的正则替换
//!
//! # 模块组织
//!
//! - `url` - 数据URL、远程引用判断、路径记号校验
//! - `replace` - 在替换闭包中传播错误的正则替换

pub mod replace;
pub mod url;

// Re-export commonly used items for convenience
pub use replace::try_replace_all;
pub use url::{
    create_data_url, is_absolute_reference, is_path_token, is_remote_url, join_path,
    join_pattern,
};
