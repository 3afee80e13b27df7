mod policy;
mod principal;
mod token;
