pub mod abcd2;
pub mod alvarado;
pub mod centor;
pub mod chads_vasc;
pub mod curb65;
pub mod qsofa;
pub mod wells_pe;
