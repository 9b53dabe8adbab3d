// src/application/commands/contacts/mod.rs
mod service;

pub use service::{
    ContactCommandService, CreateContactCommand, DeleteContactCommand, UpdateContactCommand,
};
