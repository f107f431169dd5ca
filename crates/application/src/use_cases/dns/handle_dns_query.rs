use super::{ForwardQueryUseCase, RecursiveResolveUseCase, SynthesizeVia6UseCase};
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Record, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use via6_dns_domain::{DomainError, LookupMode};

/// Entry point for every inbound QUERY.
///
/// | type  | answer section                                |
/// |-------|-----------------------------------------------|
/// | AAAA  | 4-via-6 records built from the name's A records |
/// | A     | always empty                                  |
/// | other | upstream's answer section, verbatim           |
///
/// Only the first question is looked at. Failures never reach the client:
/// they are logged and the reply goes out with an empty answer section.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<RecursiveResolveUseCase>,
    synthesizer: SynthesizeVia6UseCase,
    forwarder: Arc<ForwardQueryUseCase>,
    lookup_mode: LookupMode,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<RecursiveResolveUseCase>, forwarder: Arc<ForwardQueryUseCase>) -> Self {
        Self {
            resolver,
            synthesizer: SynthesizeVia6UseCase::new(),
            forwarder,
            lookup_mode: LookupMode::Recursive,
        }
    }

    pub fn with_lookup_mode(mut self, lookup_mode: LookupMode) -> Self {
        self.lookup_mode = lookup_mode;
        self
    }

    pub async fn handle(&self, request: &Message) -> Message {
        let mut reply = Self::reply_to(request);

        let Some(question) = request.queries().first() else {
            debug!(id = request.id(), "Request carries no question");
            return reply;
        };
        reply.add_query(question.clone());

        let start = Instant::now();
        match self.answer(question, request).await {
            Ok(answers) => {
                debug!(
                    name = %question.name(),
                    record_type = ?question.query_type(),
                    answers = answers.len(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Query answered"
                );
                reply.add_answers(answers);
            }
            Err(e) => {
                warn!(
                    name = %question.name(),
                    record_type = ?question.query_type(),
                    error = %e,
                    "Failed lookup"
                );
            }
        }

        reply
    }

    async fn answer(&self, question: &Query, request: &Message) -> Result<Vec<Record>, DomainError> {
        match question.query_type() {
            RecordType::AAAA => {
                let ipv4_records = self.lookup_ipv4(question, request).await?;
                self.synthesizer.synthesize(question.name(), &ipv4_records)
            }
            // The destination's IPv4 address must never reach the client.
            RecordType::A => Ok(Vec::new()),
            _ => {
                let response = self.forwarder.forward(question, request).await?;
                if response.answers().is_empty() {
                    return Err(DomainError::NotFound(format!(
                        "upstream {} returned no answers for {}",
                        self.forwarder.upstream(),
                        question.name()
                    )));
                }
                Ok(response.answers().to_vec())
            }
        }
    }

    async fn lookup_ipv4(&self, question: &Query, request: &Message) -> Result<Vec<Record>, DomainError> {
        match self.lookup_mode {
            LookupMode::Recursive => self.resolver.resolve(question.name()).await,
            LookupMode::Upstream => {
                let mut a_question = Query::new();
                a_question.set_name(question.name().clone());
                a_question.set_query_type(RecordType::A);
                a_question.set_query_class(DNSClass::IN);

                let response = self.forwarder.forward(&a_question, request).await?;
                Ok(response.answers().to_vec())
            }
        }
    }

    fn reply_to(request: &Message) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.set_recursion_available(true);
        reply.set_response_code(ResponseCode::NoError);
        reply
    }
}
