mod lrc_test;
mod share_location_test;
