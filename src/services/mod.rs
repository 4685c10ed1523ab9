pub mod badge_service;
