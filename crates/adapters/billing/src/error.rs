//! Error types for billing adapter

use thiserror::Error;
use tonic::{Code, Status};

/// 计费客户端错误
#[derive(Debug, Error)]
pub enum BillingError {
    /// 目标地址非法，构造时报错
    #[error("Invalid billing endpoint: {0}")]
    InvalidEndpoint(String),

    /// 远端不可达（连接被拒绝、DNS 失败等）
    #[error("Billing service unavailable: {0}")]
    Unavailable(String),

    /// 调用方设置的截止时间已超过
    #[error("Billing call timed out: {0}")]
    Timeout(String),

    /// 远端返回应用级错误状态
    #[error("Billing service rejected request ({code}): {message}")]
    Rejected { code: Code, message: String },

    /// 客户端已关闭
    #[error("Billing client is closed")]
    Closed,
}

/// Convert a tonic status into the adapter error taxonomy
pub(crate) fn map_status(status: Status) -> BillingError {
    match status.code() {
        Code::Unavailable => BillingError::Unavailable(status.message().to_string()),
        Code::DeadlineExceeded => BillingError::Timeout(status.message().to_string()),
        code => BillingError::Rejected {
            code,
            message: status.message().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_unavailable() {
        let err = map_status(Status::unavailable("connection refused"));
        assert!(matches!(err, BillingError::Unavailable(_)));
    }

    #[test]
    fn test_map_deadline_exceeded() {
        let err = map_status(Status::deadline_exceeded("deadline elapsed"));
        assert!(matches!(err, BillingError::Timeout(_)));
    }

    #[test]
    fn test_map_application_error() {
        let err = map_status(Status::invalid_argument("missing email"));
        match err {
            BillingError::Rejected { code, message } => {
                assert_eq!(code, Code::InvalidArgument);
                assert_eq!(message, "missing email");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_map_internal_error() {
        let err = map_status(Status::internal("billing ledger write failed"));
        assert!(matches!(
            err,
            BillingError::Rejected {
                code: Code::Internal,
                ..
            }
        ));
    }
}
