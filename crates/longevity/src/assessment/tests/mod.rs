mod catalog;
mod common;
mod intake;
mod recommend;
mod trajectory;
