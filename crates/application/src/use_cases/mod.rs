pub mod dns;

pub use dns::{
    ForwardQueryUseCase, HandleDnsQueryUseCase, RecursiveResolveUseCase, SynthesizeVia6UseCase,
};
