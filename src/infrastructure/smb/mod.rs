pub mod chunked_read;
mod mock_fetcher;
mod smb_fetcher;

pub use mock_fetcher::MockAudioFetcher;
pub use smb_fetcher::SmbAudioFetcher;
