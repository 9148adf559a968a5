mod key64;
mod layout;
