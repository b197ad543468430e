mod rsvp_tests;
mod utils;
