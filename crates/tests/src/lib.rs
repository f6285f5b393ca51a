#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod catalog_tests;

#[cfg(test)]
mod checkout_tests;
