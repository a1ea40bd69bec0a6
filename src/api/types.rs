use serde::{Deserialize, Serialize};

/// A product definition. The name doubles as the identifier; products are
/// never mutated or deleted from this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
}

/// One inventory entry: a quantity recorded against a product name.
///
/// The client addresses records positionally (index in the list the server
/// returned); there is no stable key on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub name: String,
    pub quantity: u32,
}
