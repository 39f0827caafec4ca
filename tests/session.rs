use serial_data_stream::{
    close_session, emit, DataStream, LineEncoder, LineEnding, StreamError, WriteSink,
};
fn value_fields(line: &str) -> Vec<&str> {
    let body = line.trim_end_matches(['\r', '\n']);
    let (_, values) = body.rsplit_once(':').unwrap();
    values.split_terminator(',').collect()
}
#[test]
fn capacity_three_rejects_fourth_and_emits_three_fields() {
    let mut stream = DataStream::<i32>::new("sensor", 3).unwrap();
    assert!(stream.append(1));
    assert!(stream.append(2));
    assert!(stream.append(3));
    assert!(!stream.append(4));
    assert_eq!(stream.len(), 3);
    let mut out = String::new();
    emit(&mut out, &stream, "x");
    assert_eq!(out, "_data_stream_:sensor_x:1,2,3,\r\n");
    assert_eq!(value_fields(&out), ["1", "2", "3"]);
}
#[test]
fn every_capacity_rejects_after_filling() {
    for capacity in 0..16 {
        let mut stream = DataStream::<u32>::new("c", capacity).unwrap();
        for value in 0..capacity as u32 {
            assert!(stream.append(value));
        }
        assert!(!stream.append(0));
        assert_eq!(stream.len(), capacity);
        let mut out = String::new();
        emit(&mut out, &stream, "n");
        assert_eq!(value_fields(&out).len(), capacity);
        assert_eq!(out.matches(',').count(), capacity);
    }
}
#[test]
fn float_sample_has_ten_fraction_digits() {
    let mut stream = DataStream::<f32>::new("temp", 2).unwrap();
    assert!(stream.append(1.5));
    let mut out = String::new();
    emit(&mut out, &stream, "deg");
    assert_eq!(out, "_data_stream_:temp_deg:1.5000000000,\r\n");
}
#[test]
fn reset_then_refill() {
    let mut stream = DataStream::<i64>::new("r", 5).unwrap();
    stream.append(100);
    stream.append(200);
    stream.reset();
    assert_eq!(stream.len(), 0);
    for value in 0..5 {
        assert!(stream.append(value));
    }
    assert!(!stream.append(5));
    assert_eq!(stream.data(), &[0, 1, 2, 3, 4]);
}
#[test]
fn copies_evolve_independently() {
    let mut original = DataStream::<i32>::new("orig", 4).unwrap();
    original.append(1);
    let mut copy = original.clone();
    copy.append(2);
    assert_eq!(original.len(), 1);
    assert_eq!(original.size(), 4);
    assert_eq!(original.data(), &[1]);
    original.append(9);
    assert_eq!(copy.data(), &[1, 2]);
    assert_eq!(copy.name(), "orig");
}
#[test]
fn close_session_is_one_line() {
    let mut out = String::new();
    close_session(&mut out, "log.csv");
    assert_eq!(out, "_data_stream_:_close_:log.csv\r\n");
    assert_eq!(out.lines().count(), 1);
}
#[test]
fn full_session_over_an_io_writer() {
    let mut stream = DataStream::<i32>::new("my_stream", 4).unwrap();
    let mut value = 0;
    while stream.append(value) {
        value += 1;
    }
    let mut encoder = LineEncoder::new(WriteSink::new(Vec::<u8>::new(), LineEnding::Lf));
    encoder.emit(&stream, "postfix");
    encoder.close_session("data_file_name");
    let bytes = encoder.into_sink().into_inner();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "_data_stream_:my_stream_postfix:0,1,2,3,\n_data_stream_:_close_:data_file_name\n"
    );
}
#[test]
fn invalid_construction_is_reported() {
    assert!(matches!(
        DataStream::<f64>::with_signed_capacity("neg", -10),
        Err(StreamError::InvalidCapacity(-10))
    ));
    assert!(matches!(
        DataStream::<f64>::new("a\nb", 1),
        Err(StreamError::InvalidLabel(_))
    ));
}
