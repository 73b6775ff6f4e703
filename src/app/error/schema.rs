/// Failure half of the response envelope.
#[derive(serde::Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}
