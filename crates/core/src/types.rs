/// All record identifiers, in memory and in PostgreSQL (BIGSERIAL).
pub type DbId = i64;
