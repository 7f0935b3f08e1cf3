pub mod candidate_service;
pub mod interest_service;
