mod helpers;
mod is_admin;
mod login;
mod register;
