use anyhow::Context;
use dnsfault_application::use_cases::SimulateResponseUseCase;
use dnsfault_domain::Config;
use dnsfault_infrastructure::dns::{RawIcmpSender, UdpDnsSocket};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DnsServices {
    pub socket: Arc<UdpDnsSocket>,
    pub use_case: SimulateResponseUseCase,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_addr = config.server.listen_addr();
        let bind_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", listen_addr))?;

        let socket = Arc::new(UdpDnsSocket::bind(bind_addr, config.server.recv_buffer_size)?);

        let use_case = SimulateResponseUseCase::new(
            &config.simulator.mode,
            socket.clone(),
            Arc::new(RawIcmpSender::new()),
            socket.clone(),
        )
        .with_icmp_kind(config.simulator.icmp_kind());

        match use_case.mode() {
            Some(mode) => info!(
                mode = %mode,
                icmp_type = config.simulator.icmp_type,
                icmp_code = config.simulator.icmp_code,
                "Response mode selected"
            ),
            None => warn!(
                mode = %config.simulator.mode,
                "Unknown response mode; every query will be dropped. \
                 Expected one of: NOERROR, FORMERR, SERVFAIL, NOTIMPL, ICMP_ERROR"
            ),
        }

        Ok(Self { socket, use_case })
    }
}
