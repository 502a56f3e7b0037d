pub mod cpf;
pub mod validate;
