// ==========================================
// 餐饮库存决策支持系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 参考数据错误 (致命) =====
    #[error("配方表缺少菜品名称列 ({path}): 表头为 {headers:?}")]
    ItemColumnMissing { path: String, headers: Vec<String> },
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
