pub mod session {
    pub mod entity;
    pub mod store;
}
