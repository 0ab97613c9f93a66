pub mod request;
pub mod response;
pub use request::GenerateQuestionsQuery;
pub use response::GenerateQuestionsResponse;
