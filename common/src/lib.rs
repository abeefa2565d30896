pub mod aggregate;
pub mod amount;
pub mod card;
pub mod chain;
pub mod digital_wallet;
pub mod history;
pub mod intent;
pub mod register;
pub mod send_flow;
pub mod source;
pub mod wallet;
