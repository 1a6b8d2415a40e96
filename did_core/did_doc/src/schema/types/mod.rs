pub mod jsonwebkey;
