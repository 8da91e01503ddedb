#[derive(Debug)]
pub(crate) struct ValueCell {
    pub(crate) position: u64,
    pub(crate) value: String,
}
