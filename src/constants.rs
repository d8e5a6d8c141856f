pub const DB_NAME: &str = "CMSC335DB";
pub const COLL_NAME: &str = "nelsonClickerData";

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

pub const BCRYPT_COST: u32 = 10;
pub const LEADERBOARD_SIZE: i64 = 5;

pub const JOKE_FALLBACK: &str = "Couldn't fetch a joke. Please try again later.";

pub const USER_NOT_FOUND_LOGIN: &str = "User not found. Would you like to create an account?";
pub const INVALID_PASSWORD: &str = "Invalid password";
pub const USERNAME_TAKEN: &str = "Username taken, if this is you, please login.";
