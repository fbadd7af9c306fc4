// Composition root for the users service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the selected user repository.
// - Wire it into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
