use crate::model::Answer;

/// Shipped true/false bank: `(id, text, stored answer)`.
pub(crate) const QUESTIONS: &[(u32, &str, Answer)] = &[
    (1, "ぱてべらは かべがみを せつだんするときに つかう こうぐです。", Answer::False),
    (2, "ひろい せこうめんの ながさを はかるときは、 ながい メジャーを つかうとよいです。", Answer::True),
    (3, "パテには、 なかぬりようも あります。", Answer::True),
    (4, "おりものは、 かべがみには つかわれません。", Answer::False),
    (5, "たかい ところで さぎょうするときは、 あんぜんたいを しようします。", Answer::True),
    (6, "きゃたつ さぎょうは てんばんに のってはなりません。", Answer::True),
    (7, "🚫 の さいんは、 きんしの まーくでは ありません。", Answer::False),
    (8, "はばきは てんじょうと かべの つぎめに つかわれます。", Answer::False),
    (9, "ビニルは、 かべがみには つかわれません。", Answer::False),
    (10, "あんぜんつうろには、 ものを おいては いけません。", Answer::True),
    (11, "たかい ところで さぎょうするときは、 あんぜんたいを しようします。", Answer::True),
    (12, "きゃたつは、 ひくければ とびおりても よいです。", Answer::False),
    (13, "かべがみの のりには、 でんぷんのりや ごうせいじゅし せっちゃくざいが あります。", Answer::True),
    (14, "たちじょうぎは ながさを はかるときに つかいます。", Answer::False),
    (15, "いのちづなは、 おやづなに かけなくては いけません。", Answer::True),
    (16, "かべがみには むじのものは、 ありません。", Answer::False),
    (17, "クシばけは、 かべがみの のりつけに つかいます。", Answer::False),
    (18, "せっこうボードは、 しつないの かべや てんじょうの はりしたじに つかいます。", Answer::True),
    (19, "けんちくげんばでの ふくそうは はんそででも かまいません。", Answer::False),
    (20, "せっこうぼーどは、 しつないの かべや てんじょうの はりしたじには つかわれません。", Answer::False),
    (21, "なでばけは、 かべがみに せっちゃくざいを つけるときに つかわれません。", Answer::True),
    (22, "せっちゃくざいは、 くうきちゅうに おいておくと せっちゃくりょくが かわります。", Answer::True),
    (23, "⚠︎ の まーくは、 あんぜんつうろの さいんです。", Answer::False),
    (24, "ですみは かべの 2つの めんが であって できる うちがわの かどです。", Answer::False),
    (25, "てんじょうと へきめんに かべがみを はるときは、 したじの ジョイントぶに ぱてしょりを します。", Answer::True),
    (26, "ごうはんや もるたるは、 へきそうはり したじに つかいます。", Answer::True),
    (27, "さぎょうちゅうは、 たばこを すっては いけません。", Answer::True),
    (28, "かべがみの ジョイントには、 つきつけと かさねだちの ほうほうが あります。", Answer::True),
    (29, "パテを かけた あとは、 サンダーを かけなくても よいです。", Answer::False),
    (30, "なでばけは、 せっちゃくざいを ぬるときに つかう どうぐです。", Answer::False),
    (31, "おりものくろすは びにーるくろすに くらべて そうじが しやすいです。", Answer::False),
    (32, "シーラーや プライマーは、 せっちゃくざいの みっちゃくどを たかめるために つかいます。", Answer::True),
    (33, "かべがみは かべの すんぽうと おなじ おおきさに さいだんしてから はりつける。", Answer::False),
    (34, "いりすみは かべの ふたつの めんが であって できる そとがわの かどです。", Answer::False),
    (35, "ほしつきは かべがみの くうきを ぬくときに つかいます。", Answer::False),
    (36, "はさみや カッターは、 かべがみを さいだんするときに つかいます。", Answer::True),
    (37, "じべらは ぱてを かけるときの こうぐです。", Answer::False),
    (38, "でんげんが こしょうしたときには、 こんせんとを そのままにして げんいんを しらべます。", Answer::False),
    (39, "へきめんを しあげる せこうきかんは、 かべがみで しあげるよりも とそう(ペンキ)で しあげるほうが ながいです。", Answer::True),
    (40, "かべがみようの のりは、 みずで のばすことが できません。", Answer::False),
    (41, "かべがみを はりおわった あとは、 スポンジや ぞうきんで みきりぶちなどの のりを ふきとります。", Answer::True),
    (42, "くしばけは、 かべがみを きるときに つかいます。", Answer::False),
    (43, "ひょうめんの おうとつ（でこぼこ）は、 ななめから みるより しょうめんから みるほうが みつけにくい。", Answer::True),
    (44, "かべがみには がらものは、 ありません。", Answer::False),
    (45, "ほごぼうを かぶるときは、 あごひもを しめなければ なりません。", Answer::True),
    (46, "へやの なかで しんなーを つかうときは まどを あけます。", Answer::True),
    (47, "でんげんが こしょうしたときには、 コンセントから プラグを ぬいて げんいんを しらべます。", Answer::True),
    (48, "せっちゃくざいを つけた かべがみは、 おりたたまずに もちはこびます。", Answer::False),
    (49, "かきげんきんの ばしょでも ストーブは つかっても かまいません。", Answer::False),
    (50, "シーラーや プライマーは、 かべがみの せっちゃくりょくを あげるために つかいます。", Answer::True),
    (51, "きゃたつは、 ひくくても とびおりては いけません。", Answer::True),
    (52, "たちうまは まえを むいて おりなければ なりません。", Answer::False),
    (53, "あかい いろの さいんは きんしや ていしの いみにつかわれます。", Answer::True),
    (54, "かべがみには ふねんざいりょうは ありません。", Answer::False),
    (55, "はばきは かべの きずや よごれから まもるために つけます。", Answer::True),
    (56, "へきめんを しあげる せこうきかんは、 かべがみで しあげるよりも とそうで しあげるほうが みじかいです。", Answer::False),
    (57, "じべらは かべがみを せつだんするときに つかう こうぐです。", Answer::True),
    (58, "パテべらは したじを たいらにするときに つかう こうぐです。", Answer::True),
    (59, "かべがみを はりおわった あとは、 スポンジと ぞうきんで まわりぶちなどの のりを よく ふきとります。", Answer::True),
    (60, "のりばけや のりづけきは、 かべがみに せっちゃくざいを つけるときに つかいます。", Answer::True),
    (61, "🚫 の さいんの ばしょには いっては いけません。", Answer::True),
    (62, "けんちくげんばでの ふくそうは ながそでで なければ なりません。", Answer::True),
    (63, "スムーサーは、 かべがみの くうきを ぬくときに つかいます。", Answer::True),
    (64, "カットテープや したじきテープは、 かべがみを ジョイントするときに つかいます。", Answer::True),
    (65, "きゃたつは てんばんに のって さぎょうをしても よいです。", Answer::False),
    (66, "かきげんきんの ばしょでは ストーブは つかえません。", Answer::True),
    (67, "かべがみの つきつけには したじきてーぷを つかいます。", Answer::False),
    (68, "うわパテは、 したパテの まえに かけます。", Answer::False),
    (69, "みずいとは、 かべがみを ジョイントするときに つかいます。", Answer::False),
    (70, "かべがみの ジョイントぶには、 ローラーは つかいません。", Answer::False),
    (71, "せっちゃくざいを つけた かべがみは、 おりたたんでは いけません。", Answer::False),
    (72, "へやの なかで シンナーを つかうときは まどを しめます。", Answer::False),
    (73, "ほごぼうを かぶるときは あごひもは しなくても よいです。", Answer::False),
    (74, "⚠︎  は、 ちゅういや きけんの サインです。", Answer::True),
    (75, "かべがみようの せっちゃくざいは、 みずで うすめることが できません。", Answer::False),
    (76, "コーキングざいは、 かべがみを はるまえに つかいます。", Answer::True),
    (77, "ひょうめんの おうとつ（でこぼこ）は、 しょうめんから みるより ななめから みるほうが みつけやすい。", Answer::True),
    (78, "きかいを しようするときは、 でんげんを いれます。", Answer::True),
    (79, "ぱてには、 したぬりようと うわぬりようが あります。", Answer::True),
    (80, "ひろい せこうめんの ながさを はかるときは、 みじかい メジャーを つかうとよいです。", Answer::False),
    (81, "せっちゃくざいは、 くうきちゅうに ながく おいても せっちゃくりょくは かわりません。", Answer::False),
    (82, "しょうかきや しょうかせんの まえに どうぐを おいては なりません。", Answer::True),
    (83, "きゃたつを たてるときには ゆかに ようじょうを します。", Answer::True),
    (84, "かみは たてめよりも よこめのほうが ひっぱりきょうどが つよい。", Answer::False),
    (85, "じこが おきたときは あわてずに こうどうする。", Answer::True),
    (86, "へやを ひろく みせたいときには くらいいろや こいいろの かべがみを えらぶとよい。", Answer::False),
    (87, "へやを ひろく みせたいときには しろいいろや あかるいいろのかべがみを えらぶとよい。", Answer::True),
    (88, "てんじょうを たかく みせたいときには たてがらの かべがみを えらぶとよい。", Answer::True),
    (89, "かべがみを ほかんするときには たてつみにする", Answer::True),
    (90, "かべがみようの でんぷんのりは カビの げんいんに なります。", Answer::True),
    (91, "がらものの かべがみを ジョイントするときには がらあわせを します。", Answer::True),
    (92, "こうぐの てんけんは つかうまえに かならず おこなう。", Answer::True),
    (93, "ひょうめんの おうとつは ひかりを しょうめんから あてるよりななめから あてるほうが みつけやすい。", Answer::True),
    (94, "コーキングざいは、 めじや いりすみの すきま などに じゅうてんします。", Answer::True),
    (95, "和紙くろす（かべがみ）は つうきせいが わるい。", Answer::False),
];
