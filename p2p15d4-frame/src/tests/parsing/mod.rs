mod ack;
mod data;
