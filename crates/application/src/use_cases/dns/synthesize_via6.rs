use hickory_proto::rr::rdata::AAAA;
use hickory_proto::rr::{Name, RData, Record};
use tracing::{debug, info};
use via6_dns_domain::{embed_ipv4, DomainError, SYNTHESIZED_TTL};

/// Turns resolved A records into 4-via-6 AAAA records for the queried name.
#[derive(Debug, Default, Clone, Copy)]
pub struct SynthesizeVia6UseCase;

impl SynthesizeVia6UseCase {
    pub fn new() -> Self {
        Self
    }

    /// Every A record among `records` yields one AAAA record owned by `name`.
    /// Records of any other type are skipped, and so is an A record whose
    /// 4-via-6 literal does not parse.
    pub fn synthesize(&self, name: &Name, records: &[Record]) -> Result<Vec<Record>, DomainError> {
        if records.is_empty() {
            return Err(DomainError::NotFound(format!("no A records for {}", name)));
        }

        let mut synthesized = Vec::with_capacity(records.len());

        for record in records {
            let ipv4 = match record.data() {
                RData::A(a) => a.0,
                _ => continue,
            };

            let via6 = match embed_ipv4(ipv4) {
                Ok(addr) => addr,
                Err(e) => {
                    debug!(name = %name, error = %e, "Dropping unsynthesizable record");
                    continue;
                }
            };

            info!(name = %name, via6 = %via6, "Synthesized 4via6 address");

            synthesized.push(Record::from_rdata(
                name.clone(),
                SYNTHESIZED_TTL,
                RData::AAAA(AAAA(via6)),
            ));
        }

        if synthesized.is_empty() {
            return Err(DomainError::NotFound(format!(
                "no A record for {} survived synthesis",
                name
            )));
        }

        Ok(synthesized)
    }
}
