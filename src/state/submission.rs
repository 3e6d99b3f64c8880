use crate::api::{ApiError, SubmissionTransport};
use crate::models::{FormFields, FormPayload};
use crate::state::SubmissionPhase;
use crate::upload::{encode_attachments, AttachmentSource, UploadError};
use thiserror::Error;

/// Fewest attachments a submission may carry.
pub const MIN_ATTACHMENTS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please upload at least 2 PDF files")]
    TooFewFiles { found: usize },

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The endpoint answered but did not report success.
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    /// Checks made before anything is read or sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::TooFewFiles { .. })
    }

    /// Text for the blocking alert.
    pub fn alert_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}

pub fn validate_attachment_count(found: usize) -> Result<(), SubmitError> {
    if found < MIN_ATTACHMENTS {
        return Err(SubmitError::TooFewFiles { found });
    }
    Ok(())
}

/// Encodes every file (in order) and sends one payload.
///
/// `on_phase` sees `Encoding` then `Dispatching`; the caller owns the final
/// Succeeded/Failed/Idle transitions.
pub async fn encode_and_dispatch<T, S>(
    transport: &T,
    fields: FormFields,
    files: &[S],
    timestamp: String,
    mut on_phase: impl FnMut(SubmissionPhase),
) -> Result<(), SubmitError>
where
    T: SubmissionTransport + ?Sized,
    S: AttachmentSource,
{
    on_phase(SubmissionPhase::Encoding);
    let attachments = encode_attachments(files).await?;

    let payload = FormPayload {
        fields,
        timestamp,
        files: attachments,
    };

    on_phase(SubmissionPhase::Dispatching);
    tracing::info!(files = payload.files.len(), "dispatching submission");
    let response = transport.send(&payload).await?;

    if response.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.failure_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiErrorKind, ApiResult};
    use crate::models::SubmitResponse;
    use crate::upload::testing::FakeFile;
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every payload and answers with a canned reply.
    struct FakeTransport {
        reply: ApiResult<SubmitResponse>,
        sent: RefCell<Vec<FormPayload>>,
    }

    impl FakeTransport {
        fn replying(json: &str) -> Self {
            Self {
                reply: Ok(serde_json::from_str(json).expect("canned reply")),
                sent: RefCell::new(vec![]),
            }
        }

        fn failing(kind: ApiErrorKind, message: &str) -> Self {
            Self {
                reply: Err(ApiError {
                    kind,
                    message: message.to_string(),
                }),
                sent: RefCell::new(vec![]),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl SubmissionTransport for FakeTransport {
        async fn send(&self, payload: &FormPayload) -> ApiResult<SubmitResponse> {
            self.sent.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn fields() -> FormFields {
        FormFields {
            full_name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            college: "Yale".to_string(),
            subject: "Compilers".to_string(),
            message: "An idea".to_string(),
        }
    }

    const TS: &str = "2024-05-01T10:00:00.000Z";

    /// The form's whole pipeline: count check, then encode and dispatch.
    async fn submit(
        transport: &FakeTransport,
        fields: FormFields,
        files: &[FakeFile],
        timestamp: String,
        on_phase: impl FnMut(SubmissionPhase),
    ) -> Result<(), SubmitError> {
        validate_attachment_count(files.len())?;
        encode_and_dispatch(transport, fields, files, timestamp, on_phase).await
    }

    #[test]
    fn test_too_few_files_never_reaches_transport() {
        let transport = FakeTransport::replying(r#"{"success": true}"#);
        for files in [vec![], vec![FakeFile::pdf("only.pdf", b"x")]] {
            let mut phases = vec![];
            let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |p| {
                phases.push(p)
            }))
            .expect_err("must reject");

            assert_eq!(err, SubmitError::TooFewFiles { found: files.len() });
            assert!(err.is_validation());
            assert_eq!(err.alert_message(), "Please upload at least 2 PDF files");
            assert!(phases.is_empty());
        }
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_success_sends_ordered_payload() {
        let transport = FakeTransport::replying(r#"{"success": true}"#);
        let files = vec![
            FakeFile::pdf("one.pdf", b"%PDF-one"),
            FakeFile::new("two.PDF", "", b"%PDF-two"),
            FakeFile::pdf("three.pdf", b"%PDF-three"),
        ];
        let mut phases = vec![];

        block_on(submit(&transport, fields(), &files, TS.to_string(), |p| {
            phases.push(p)
        }))
        .expect("should succeed");

        assert_eq!(
            phases,
            vec![SubmissionPhase::Encoding, SubmissionPhase::Dispatching]
        );
        assert_eq!(transport.calls(), 1);

        let sent = transport.sent.borrow();
        let payload = &sent[0];
        assert_eq!(payload.fields, fields());
        assert_eq!(payload.timestamp, TS);
        let names: Vec<_> = payload.files.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["one.pdf", "two.PDF", "three.pdf"]);
        assert_eq!(payload.files[1].mime_type, "");
        for (a, f) in payload.files.iter().zip(&files) {
            assert_eq!(STANDARD.decode(&a.content).expect("base64"), f.bytes);
        }
    }

    #[test]
    fn test_rejected_response_carries_server_error() {
        let transport =
            FakeTransport::replying(r#"{"success": false, "error": "Drive quota exceeded"}"#);
        let files = vec![FakeFile::pdf("a.pdf", b"a"), FakeFile::pdf("b.pdf", b"b")];

        let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |_| {}))
            .expect_err("must fail");
        assert_eq!(err, SubmitError::Rejected("Drive quota exceeded".to_string()));
        assert!(!err.is_validation());
        assert_eq!(err.alert_message(), "Error: Drive quota exceeded");
    }

    #[test]
    fn test_rejected_response_without_message() {
        let transport = FakeTransport::replying(r#"{"error": null}"#);
        let files = vec![FakeFile::pdf("a.pdf", b"a"), FakeFile::pdf("b.pdf", b"b")];

        let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |_| {}))
            .expect_err("must fail");
        assert_eq!(err.alert_message(), "Error: Submission failed");
    }

    #[test]
    fn test_transport_error_is_surfaced() {
        let transport = FakeTransport::failing(ApiErrorKind::Network, "Failed to fetch");
        let files = vec![FakeFile::pdf("a.pdf", b"a"), FakeFile::pdf("b.pdf", b"b")];

        let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |_| {}))
            .expect_err("must fail");
        assert!(matches!(err, SubmitError::Api(ref e) if e.kind == ApiErrorKind::Network));
        assert_eq!(err.alert_message(), "Error: Failed to fetch");
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_read_failure_sends_nothing() {
        let transport = FakeTransport::replying(r#"{"success": true}"#);
        let files = vec![
            FakeFile::pdf("a.pdf", b"a"),
            FakeFile::pdf("b.pdf", b"b").unreadable(),
        ];
        let mut phases = vec![];

        let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |p| {
            phases.push(p)
        }))
        .expect_err("must fail");

        assert_eq!(err.alert_message(), "Error: File conversion failed");
        assert_eq!(phases, vec![SubmissionPhase::Encoding]);
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_tampered_selection_rejected_during_encoding() {
        let transport = FakeTransport::replying(r#"{"success": true}"#);
        let files = vec![
            FakeFile::pdf("a.pdf", b"a"),
            FakeFile::new("b.docx", "application/msword", b"b"),
        ];

        let err = block_on(submit(&transport, fields(), &files, TS.to_string(), |_| {}))
            .expect_err("must fail");
        assert_eq!(err.alert_message(), "Error: Only PDF files are allowed");
        assert_eq!(transport.calls(), 0);
    }
}
