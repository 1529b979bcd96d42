// HomeGrid services
// Services provide core functionality: ID generation, schema migration,
// visual pagination, and persistence (local file, remote mirror, gateway).

pub mod gateway;
pub mod ids;
pub mod local_store;
pub mod migrator;
pub mod paginator;
pub mod remote_store;
