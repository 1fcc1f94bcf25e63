mod helpers;

mod character_test;
mod favorite_test;
mod planet_test;
mod user_test;
