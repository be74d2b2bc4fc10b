pub const API_MESSAGE: &str = "Party Menu Selection API";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

pub const SELECTION_ADDED_MSG: &str = "Selection added";
pub const SELECTION_REMOVED_MSG: &str = "Selection removed";
pub const DISH_NOT_FOUND_MSG: &str = "Dish not found";

// pending store requests before handlers start waiting on send
pub const SELECTION_QUEUE_SIZE: usize = 64;
