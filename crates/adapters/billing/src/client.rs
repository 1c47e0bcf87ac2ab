//! 计费服务 gRPC 客户端实现

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pm_config::BillingServiceConfig;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::error::{map_status, BillingError};
use crate::proto::billing_service_client::BillingServiceClient;
use crate::{BillingAccounts, BillingRequest, BillingResponse};

/// 计费服务客户端
///
/// 持有到计费服务的单一 channel，并发调用由传输层多路复用。
/// clone 与原实例共享 channel 和关闭标记。
#[derive(Clone)]
pub struct BillingClient {
    stub: BillingServiceClient<Channel>,
    endpoint: String,
    closed: Arc<AtomicBool>,
}

impl BillingClient {
    /// 创建新的计费客户端
    ///
    /// channel 在此处创建，TCP 连接推迟到首次调用；
    /// 远端暂不可达不影响构造，地址非法立即报错。
    pub fn connect(config: BillingServiceConfig) -> Result<Self, BillingError> {
        let endpoint = config.endpoint();
        info!(endpoint = %endpoint, "Connecting to billing service");

        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| BillingError::InvalidEndpoint(e.to_string()))?
            .connect_lazy();

        Ok(Self {
            stub: BillingServiceClient::new(channel),
            endpoint,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// 关闭客户端
    ///
    /// 终态操作：之后本实例及所有 clone 的调用都返回
    /// [`BillingError::Closed`]。
    pub fn close(&self) {
        info!(endpoint = %self.endpoint, "Closing billing client");
        self.closed.store(true, Ordering::SeqCst);
    }

    /// 客户端是否已关闭
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// 目标 endpoint URI
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl BillingAccounts for BillingClient {
    async fn create_billing_account(
        &self,
        patient_id: &str,
        name: &str,
        email: &str,
    ) -> Result<BillingResponse, BillingError> {
        if self.is_closed() {
            return Err(BillingError::Closed);
        }

        debug!(endpoint = %self.endpoint, patient_id = %patient_id, "Creating billing account");

        let request = BillingRequest {
            patient_id: patient_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };

        // 生成的 stub 需要 &mut self，clone 共享底层 channel
        let mut stub = self.stub.clone();
        let response = stub
            .create_patient_account(request)
            .await
            .map_err(map_status)?
            .into_inner();

        info!(
            patient_id = %patient_id,
            account_id = %response.account_id,
            status = %response.status,
            "Received response from billing service"
        );

        Ok(response)
    }
}
