pub mod feed_form;
