use hickory_proto::rr::Name;
use std::str::FromStr;
use via6_dns_application::use_cases::RecursiveResolveUseCase;
use via6_dns_domain::DomainError;

/// One-shot walk for `domain`; prints each record of the final answer.
pub async fn run(resolver: &RecursiveResolveUseCase, domain: &str) -> Result<(), DomainError> {
    let name = Name::from_str(domain)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

    let records = resolver.resolve(&name).await?;
    if records.is_empty() {
        return Err(DomainError::NotFound(domain.to_string()));
    }

    for record in &records {
        println!("{}", record);
    }
    Ok(())
}
