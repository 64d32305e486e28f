// ==========================================
// 餐饮库存决策支持系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 仅配方矩阵缺失属于致命错误,其余行级异常
//       均为 warn-and-skip,保留部分输出
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 参考数据错误 (致命) =====
    #[error("配方矩阵不可用: {0}")]
    RecipeUnavailable(String),

    // ===== 配置错误 =====
    #[error("配置文件加载失败 ({path}): {message}")]
    ConfigLoad { path: String, message: String },

    // ===== 导入错误 =====
    #[error(transparent)]
    Import(#[from] ImportError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
