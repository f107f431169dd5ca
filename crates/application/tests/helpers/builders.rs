use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME, MX, NS, SOA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn ipv4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ipv4(ip))))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns_record(zone: &str, nameserver: &str) -> Record {
    Record::from_rdata(name(zone), 172_800, RData::NS(NS(name(nameserver))))
}

pub fn soa_record(zone: &str, primary: &str) -> Record {
    let soa = SOA::new(
        name(primary),
        name(&format!("hostmaster.{}", zone)),
        1,
        3600,
        900,
        604_800,
        300,
    );
    Record::from_rdata(name(zone), 300, RData::SOA(soa))
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::TXT(TXT::new(vec![text.to_string()])),
    )
}

pub fn question(owner: &str, record_type: RecordType) -> Query {
    let mut query = Query::new();
    query.set_name(name(owner));
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);
    query
}

/// A client request as it would arrive at the listener.
pub fn request(id: u16, owner: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(question(owner, record_type));
    message
}

/// Assembles a nameserver reply section by section.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: Message::new(0, MessageType::Response, OpCode::Query),
        }
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.message.add_name_server(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn empty_response() -> Message {
    ResponseBuilder::new().build()
}

pub fn referral(zone: &str, nameserver: &str, glue: &str) -> Message {
    ResponseBuilder::new()
        .authority(ns_record(zone, nameserver))
        .additional(a_record(nameserver, glue))
        .build()
}
