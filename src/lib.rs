// ============================================================================
// ORDER CONSOLE - Yew front end for order management
// ============================================================================
// Layers:
// - Components: render only, forward events to hooks
// - Hooks: bridge yew state to the viewmodel and session
// - ViewModels: CRUD orchestration and notifications
// - Services: backend access, order cache, session gate
// - State: view, modal and session state machines
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
