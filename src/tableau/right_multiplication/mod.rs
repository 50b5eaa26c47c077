mod cx;
mod h;
mod hsh;
mod s;
mod swap;
