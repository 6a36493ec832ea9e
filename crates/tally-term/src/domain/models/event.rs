use tally_core::KeyToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyToken),
    UIResize(u16, u16),
    UITick,
}
