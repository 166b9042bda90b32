mod pcm_decoder_test;
mod whisper_engine_test;
