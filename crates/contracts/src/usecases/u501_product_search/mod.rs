pub mod criteria;
pub mod dto;
