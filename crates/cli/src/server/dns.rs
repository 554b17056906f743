use dnsfault_application::use_cases::{DispatchOutcome, SimulateResponseUseCase};
use dnsfault_domain::{DomainError, InboundQuery};
use dnsfault_infrastructure::dns::UdpDnsSocket;
use std::fmt::Write;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Serves queries one at a time until Ctrl-C. Per-query failures are logged
/// and never stop the loop.
pub async fn run_dns_server(
    socket: Arc<UdpDnsSocket>,
    use_case: SimulateResponseUseCase,
) -> anyhow::Result<()> {
    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    serve_until(&socket, &use_case, ctrl_c_signal()).await;

    Ok(())
}

async fn ctrl_c_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

/// Runs the receive/dispatch loop until `shutdown` completes. A query still
/// being dispatched when shutdown fires is abandoned.
async fn serve_until<F>(socket: &UdpDnsSocket, use_case: &SimulateResponseUseCase, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = serve_one(socket, use_case) => {}
        }
    }
}

async fn serve_one(socket: &UdpDnsSocket, use_case: &SimulateResponseUseCase) {
    match socket.recv_query().await {
        Ok(query) => handle_query(use_case, &query).await,
        Err(e) => warn!(error = %e, "UDP recv error"),
    }
}

async fn handle_query(use_case: &SimulateResponseUseCase, query: &InboundQuery) {
    match use_case.execute(query).await {
        Ok(DispatchOutcome::DnsReply {
            query_id,
            rcode,
            destination,
            response,
        }) => {
            info!(client = %destination, query_id, rcode, "Received query, sent DNS response");
            debug!(response = %hex_dump(&response), "Response bytes");
        }
        Ok(DispatchOutcome::IcmpError {
            destination,
            packet,
        }) => {
            info!(client = %destination, "ICMP error sent");
            debug!(packet = %hex_dump(&packet), "ICMP packet bytes");
        }
        Err(DomainError::InvalidMode(mode)) => {
            warn!(client = %query.client, mode = %mode, "Unknown response mode, query dropped");
        }
        Err(e) => {
            warn!(client = %query.client, error = %e, "Failed to simulate response");
        }
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{:02x}", b);
            out
        })
}
