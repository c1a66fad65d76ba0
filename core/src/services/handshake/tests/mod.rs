//! Unit tests for the handshake controller

mod mocks;
