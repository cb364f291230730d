pub mod notification_repository;
