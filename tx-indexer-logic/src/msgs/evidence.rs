use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::{ClassifiedMsg, InnerMsg, MsgContext, MsgRegistry};
use crate::types::TxType;

pub(super) fn register(registry: &mut MsgRegistry) {
    registry.register::<MsgSubmitEvidence>();
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitEvidence {
    #[prost(string, tag = "1")]
    pub submitter: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub evidence: ::core::option::Option<::prost_types::Any>,
}

/// The evidence itself is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMsgSubmitEvidence {
    pub submitter: String,
    pub evidence_type: String,
    pub evidence: String,
}

impl InnerMsg for MsgSubmitEvidence {
    const TYPE_URL: &'static str = "/irishub.evidence.MsgSubmitEvidence";

    fn classify(self, _ctx: &MsgContext<'_>) -> ClassifiedMsg {
        let (evidence_type, evidence) = self
            .evidence
            .map(|any| (any.type_url, STANDARD.encode(any.value)))
            .unwrap_or_default();
        let doc = DocMsgSubmitEvidence {
            submitter: self.submitter,
            evidence_type,
            evidence,
        };
        ClassifiedMsg::new(TxType::SubmitEvidence, &doc).from(doc.submitter)
    }
}
