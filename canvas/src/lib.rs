//! View pipeline for the slither client.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and natively
//! for tests and the headless client. It turns a stream of authoritative
//! server snapshots into a smooth, camera-relative scene at the client's own
//! frame rate, and samples pointer and keyboard input into outbound steering.
//! The host layer delivers snapshots, calls [`engine::Engine::frame`] once per
//! animation frame, draws the returned [`scene::Scene`], and sends any
//! [`input::ControlSignal`] the tick produced.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`reconcile`] | Snapshot reconciliation into id-keyed presenter sets |
//! | [`presenter`] | Food and player presenters (authoritative state + local animation) |
//! | [`camera`] | Smoothed follow camera and coordinate conversions |
//! | [`viewport`] | Shared view rectangle and visibility tests |
//! | [`input`] | Input event types and the pointer/boost sampler |
//! | [`control`] | Outbound control pacing |
//! | [`dom`] | Browser event listeners feeding the sampler |
//! | [`scene`] | Per-frame draw data |
//! | [`snapshot`] | Server snapshot payload types |
//! | [`config`] | Host-tunable view configuration |
//! | [`math`] | Space-tagged vectors and scalar helpers |
//! | [`color`] | Hex color parsing |
//! | [`consts`] | Shared numeric constants (zoom limits, animation rates, etc.) |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod control;
pub mod dom;
pub mod engine;
pub mod input;
pub mod math;
pub mod presenter;
pub mod reconcile;
pub mod scene;
pub mod snapshot;
pub mod viewport;
