mod forward_query;
mod handle_dns_query;
mod recursive_resolve;
mod synthesize_via6;

pub use forward_query::ForwardQueryUseCase;
pub use handle_dns_query::HandleDnsQueryUseCase;
pub use recursive_resolve::RecursiveResolveUseCase;
pub use synthesize_via6::SynthesizeVia6UseCase;
